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

use crate::errors::Error;
use crate::types::*;
use std::fs::read_to_string;
use std::path::Path;

use log::{debug, info};

/// Reads the metadata document at `path` and converts its first package into a [PkgInfo](crate::types::PkgInfo)
///
/// The `release` of the returned PkgInfo is left empty, it doesn't come from the metadata.
///
/// # Errors
///
/// * If the file can't be read
/// * See [parse_pkginfo](crate::metadata::parse_pkginfo)
pub fn load_pkginfo<P: AsRef<Path>>(path: P) -> Result<PkgInfo, Error> {
    let path = path.as_ref();

    debug!("Reading metadata from {}", path.display());

    let json = read_to_string(path).map_err(|e| {
        Error::File(format!(
            "Couldn't read metadata file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_pkginfo(&json)
}

/// Converts a metadata document (as written by `cargo metadata`) into a [PkgInfo](crate::types::PkgInfo)
///
/// # Errors
///
/// * If `json` isn't valid JSON
/// * If there's no `packages` list, or it's empty
/// * If the first package lacks one of `name`, `version`, `description`, `repository` or
///   `license`, or one of those isn't a string
/// * If the package name is empty
pub fn parse_pkginfo(json: &str) -> Result<PkgInfo, Error> {
    let doc: MetadataDoc = serde_json::from_str(json)?;

    let pkg = match doc.packages.into_iter().next() {
        Some(pkg) => pkg,
        None => {
            return Err(Error::DataFormat(
                "The metadata doesn't contain any packages!".to_string(),
            ))
        }
    };

    if pkg.name.is_empty() {
        return Err(Error::DataFormat(
            "The first package in the metadata has an empty name!".to_string(),
        ));
    }

    info!("Found package {} {}", pkg.name, pkg.version);

    Ok(PkgInfo {
        pkg_name: pkg.name,
        version: pkg.version,
        release: String::new(),
        description: pkg.description,
        url: pkg.repository,
        license: vec![pkg.license],
    })
}
