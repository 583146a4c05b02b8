/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Debugging helpers
//!
//! Functions for turning paths into text that can be pasted back into a test
//!

mod buffer_to_string;

pub use self::buffer_to_string::*;
