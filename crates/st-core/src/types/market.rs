/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Stock exchange identifiers.

use serde::{Deserialize, Serialize};

/// Stock exchange identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Exchange {
  /// National Stock Exchange of India
  NSE,
  /// Bombay Stock Exchange
  BSE,
}

impl std::fmt::Display for Exchange {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Exchange::NSE => write!(f, "NSE"),
      Exchange::BSE => write!(f, "BSE"),
    }
  }
}

impl Exchange {
  /// Parse exchange from string
  pub fn from_str(s: &str) -> Option<Self> {
    match s.to_uppercase().as_str() {
      "NSE" | "NATIONAL STOCK EXCHANGE OF INDIA" => Some(Exchange::NSE),
      "BSE" | "BOMBAY STOCK EXCHANGE" => Some(Exchange::BSE),
      _ => None,
    }
  }

  /// Get the full name of the exchange
  pub fn full_name(&self) -> &'static str {
    match self {
      Exchange::NSE => "National Stock Exchange of India",
      Exchange::BSE => "Bombay Stock Exchange",
    }
  }
}
