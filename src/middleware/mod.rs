// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Response middleware.

pub mod headers;

pub use headers::add_response_headers;
