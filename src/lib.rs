// Copyright (c) Microsoft Corporation
// SPDX-License-Identifier: MIT

pub mod result;
pub mod result_error;

pub use result::{Result, ResultPromise, Results};
pub use result_error::ResultError;
