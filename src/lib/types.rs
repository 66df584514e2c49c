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

use serde_derive::Deserialize;

/// The PkgBuilder struct, which is used to build a [Template](crate::types::Template)
pub struct PkgBuilder {
    pub pkg_info: PkgInfo,
}

/// A rendered PKGBUILD and the name of the package it belongs to
pub struct Template {
    pub inner: String,
    pub name: String,
}

/// The PkgInfo struct, that contains all info relevant to the package
#[derive(Clone, Eq, Ord, PartialOrd, Hash, Default, Debug, PartialEq)]
pub struct PkgInfo {
    pub pkg_name: String,
    pub version: String,
    pub release: String,
    pub description: String,
    pub url: String,
    pub license: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct MetadataDoc {
    pub packages: Vec<PackageRecord>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PackageRecord {
    pub name: String,
    pub version: String,
    pub description: String,
    pub repository: String,
    pub license: String,
}
