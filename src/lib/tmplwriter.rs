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
use crate::helpers::*;
use crate::metadata::load_pkginfo;
use crate::types::*;
use std::fs::read_to_string;
use std::io::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::Builder as TempBuilder;

use log::{debug, info, warn};

/// The name of the file [write_template](crate::tmplwriter::write_template) writes to
pub const PKGBUILD_NAME: &str = "PKGBUILD";

impl PkgBuilder {
    /// Initializes a new PkgBuilder from the first package in the metadata file at `path`.
    ///
    /// # Errors
    ///
    /// * See [load_pkginfo](crate::metadata::load_pkginfo)
    pub fn from_metadata<P: AsRef<Path>>(path: P) -> Result<PkgBuilder, Error> {
        Ok(PkgBuilder {
            pkg_info: load_pkginfo(path)?,
        })
    }

    /// Initializes a new PkgBuilder from a PkgInfo. Useful for testing or as a shortcut
    pub fn from_pkg_info(pkg_info: PkgInfo) -> PkgBuilder {
        PkgBuilder { pkg_info }
    }

    /// Sets the release of the package, e.g. the `1` in `2.3.4-1`
    pub fn set_release(&mut self, release: &str) -> &mut PkgBuilder {
        self.pkg_info.release = release.to_owned();
        self
    }

    /// Generates a new [Template](crate::types::Template) from the template text `template_in`
    ///
    /// # Example
    ///
    /// ```
    /// use libpkgbuildgen::{PkgBuilder, PkgInfo};
    ///
    /// let pkg_info = PkgInfo {
    ///     pkg_name: "foo".to_string(),
    ///     version: "1.2.3".to_string(),
    ///     description: "A tool".to_string(),
    ///     url: "https://example.com/foo".to_string(),
    ///     license: vec!["MIT".to_string()],
    ///     ..Default::default()
    /// };
    ///
    /// let template = PkgBuilder::from_pkg_info(pkg_info)
    ///     .set_release("1")
    ///     .generate("pkgname=@@NAME@@\npkgrel=@@RELEASE@@\n")
    ///     .unwrap();
    ///
    /// assert_eq!(template.inner, "pkgname='foo'\npkgrel='1'\n");
    /// ```
    ///
    /// The release isn't validated, an empty one is rendered as `''`.
    pub fn generate(&self, template_in: &str) -> Result<Template, Error> {
        info!(
            "Generating PKGBUILD for {} {}-{}",
            &self.pkg_info.pkg_name, &self.pkg_info.version, &self.pkg_info.release
        );

        if !has_tokens(template_in) {
            warn!("The template doesn't contain any placeholders, the PKGBUILD will be identical to it!");
        }

        Ok(Template {
            inner: render(template_in, &self.pkg_info),
            name: self.pkg_info.pkg_name.clone(),
        })
    }

    /// Same as [generate](crate::tmplwriter::PkgBuilder::generate), but reads the template text
    /// from the file at `path`
    ///
    /// # Errors
    ///
    /// * If the template can't be read
    /// * See [generate](crate::tmplwriter::PkgBuilder::generate)
    pub fn generate_from_file<P: AsRef<Path>>(&self, path: P) -> Result<Template, Error> {
        let path = path.as_ref();

        debug!("Reading template from {}", path.display());

        let template_in = read_to_string(path).map_err(|e| {
            Error::File(format!("Couldn't read template {}: {}", path.display(), e))
        })?;

        self.generate(&template_in)
    }
}

/// Replaces all [TOKENS](crate::helpers::TOKENS) in `template` with the values of `pkg_info`.
///
/// This is done in one pass over `template`, so the substituted values are never scanned for
/// tokens themselves. Anything that isn't a known token is copied as is.
pub fn render(template: &str, pkg_info: &PkgInfo) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('@') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        let replacement = TOKENS
            .iter()
            .find(|x| rest.starts_with(**x))
            .and_then(|x| render_token(x, pkg_info).map(|r| (x.len(), r)));

        match replacement {
            Some((len, value)) => {
                out.push_str(&value);
                rest = &rest[len..];
            }
            None => {
                out.push('@');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);

    out
}

/// Writes `template` to `PKGBUILD` in `out_dir`, overwriting an existing PKGBUILD.
/// Returns the path of the written file.
///
/// The PKGBUILD is written to a temporary file in `out_dir` first and then renamed, so a failed
/// write leaves any previous PKGBUILD untouched.
///
/// # Errors
///
/// * If `out_dir` doesn't exist or isn't a directory. It won't be created.
/// * If the file can't be written
pub fn write_template<P: AsRef<Path>>(template: &Template, out_dir: P) -> Result<PathBuf, Error> {
    let out_dir = out_dir.as_ref();

    if !out_dir.is_dir() {
        return Err(Error::File(format!(
            "Output directory {} doesn't exist or isn't a directory!",
            out_dir.display()
        )));
    }

    let pkgbuild_path = out_dir.join(PKGBUILD_NAME);

    if pkgbuild_path.exists() {
        info!("Overwriting existing {}", pkgbuild_path.display());
    }

    let mut tmp_file = TempBuilder::new()
        .prefix(".PKGBUILD")
        .tempfile_in(out_dir)?;

    tmp_file.write_all(template.inner.as_bytes())?;

    // Temporary files are created with 0600
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp_file
            .as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))?;
    }

    debug!("Moving {} to {}", tmp_file.path().display(), pkgbuild_path.display());

    tmp_file
        .persist(&pkgbuild_path)
        .map_err(|e| Error::File(format!("Couldn't write {}: {}", pkgbuild_path.display(), e.error)))?;

    info!(
        "Wrote PKGBUILD for {} to {}",
        &template.name,
        pkgbuild_path.display()
    );

    Ok(pkgbuild_path)
}
