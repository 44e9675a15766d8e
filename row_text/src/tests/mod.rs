// Copyright 2026 the Row Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod utils;
