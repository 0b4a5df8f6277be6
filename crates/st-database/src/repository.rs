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

//! Error taxonomy shared by the data-access functions.
//!
//! Not-found is represented as `Option::None` by the fetch functions, never
//! as an error. Constraint violations and connectivity failures surface
//! directly to the caller; no retries happen at this layer.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// Database repository errors
#[derive(Error, Debug)]
pub enum RepositoryError {
  #[error("Connection error: {0}")]
  Connection(String),

  #[error("Database query error: {0}")]
  Query(String),

  #[error("Not found: {0}")]
  NotFound(String),

  #[error("Constraint violation: {0}")]
  ConstraintViolation(String),
}

impl From<DieselError> for RepositoryError {
  fn from(err: DieselError) -> Self {
    match err {
      DieselError::NotFound => RepositoryError::NotFound("Record not found".to_string()),
      DieselError::DatabaseError(kind, info) => match kind {
        DatabaseErrorKind::UniqueViolation | DatabaseErrorKind::ForeignKeyViolation => {
          RepositoryError::ConstraintViolation(info.message().to_string())
        }
        _ => RepositoryError::Query(info.message().to_string()),
      },
      _ => RepositoryError::Query(err.to_string()),
    }
  }
}

impl From<diesel::ConnectionError> for RepositoryError {
  fn from(err: diesel::ConnectionError) -> Self {
    RepositoryError::Connection(err.to_string())
  }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
