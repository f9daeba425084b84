/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Modules for turning generic OpenAPI representations into our internal
//! representations of the Graph API.
pub mod path;
pub mod schema;
