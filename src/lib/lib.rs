//This file is part of pkgbuildgen
//
//pkgbuildgen is free software: you can redistribute it and/or modify
//it under the terms of the GNU General Public License as published by
//the Free Software Foundation, either version 3 of the License, or
//(at your option) any later version.
//
//pkgbuildgen is distributed in the hope that it will be useful,
//but WITHOUT ANY WARRANTY; without even the implied warranty of
//MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//GNU General Public License for more details.
//
//You should have received a copy of the GNU General Public License
//along with pkgbuildgen.  If not, see <http://www.gnu.org/licenses/>.

//! libpkgbuildgen can be used for generating Arch Linux PKGBUILDs from the JSON metadata of a
//! package (e.g. the output of `cargo metadata --no-deps --format-version 1`) and a PKGBUILD
//! template.
//!
//! The template may contain the following placeholders:
//!
//! * `@@NAME@@`, `@@VERSION@@`, `@@RELEASE@@`, `@@DESCRIPTION@@` and `@@URL@@`, which are
//!   replaced with the single quoted value
//! * `@@LICENSE@@`, which is replaced with a shell array of single quoted licenses
//! * `@@REPO_URL@@`, which is replaced with the unquoted repository URL
//!
//! # Usage
//!
//! The following will write a PKGBUILD for the package described in `metadata.json` to
//! `pkg/PKGBUILD`
//!
//! ```no_run
//! use libpkgbuildgen::*;
//!
//! // Get a PkgBuilder for the first package in metadata.json
//! let mut pkg_builder = PkgBuilder::from_metadata("metadata.json").unwrap();
//! // The release doesn't come from the metadata, so we have to set it ourselves
//! let template = pkg_builder.set_release("1").generate_from_file("PKGBUILD.in").unwrap();
//!
//! write_template(&template, "pkg").unwrap();
//! ```

pub mod errors;
pub mod helpers;
pub mod metadata;
pub mod tmplwriter;
pub mod types;

pub use crate::errors::*;
pub use crate::helpers::*;
pub use crate::metadata::*;
pub use crate::tmplwriter::*;
pub use crate::types::*;
