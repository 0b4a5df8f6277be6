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

//! Trading tip classification types.

use serde::{Deserialize, Serialize};

/// Trading style a tip applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TipType {
  Intraday,
  Options,
  Swing,
}

impl std::fmt::Display for TipType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      TipType::Intraday => write!(f, "Intraday"),
      TipType::Options => write!(f, "Options"),
      TipType::Swing => write!(f, "Swing"),
    }
  }
}

impl TipType {
  /// Parse tip type from string
  pub fn from_str(s: &str) -> Option<Self> {
    match s.to_uppercase().as_str() {
      "INTRADAY" => Some(TipType::Intraday),
      "OPTIONS" | "OPTION" => Some(TipType::Options),
      "SWING" => Some(TipType::Swing),
      _ => None,
    }
  }
}

/// Recommended action carried by a tip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
  Buy,
  Sell,
  Hold,
}

impl std::fmt::Display for ActionType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ActionType::Buy => write!(f, "Buy"),
      ActionType::Sell => write!(f, "Sell"),
      ActionType::Hold => write!(f, "Hold"),
    }
  }
}

impl ActionType {
  /// Parse action from string
  pub fn from_str(s: &str) -> Option<Self> {
    match s.to_uppercase().as_str() {
      "BUY" => Some(ActionType::Buy),
      "SELL" => Some(ActionType::Sell),
      "HOLD" => Some(ActionType::Hold),
      _ => None,
    }
  }
}
