// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Visibility tests against a camera's view volume.

#[doc = "Six-plane frustum extracted from a clip matrix."]
pub mod frustum;
