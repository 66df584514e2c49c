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

use crate::types::*;

/// The placeholder tokens a PKGBUILD template may contain
pub const TOKENS: [&str; 7] = [
    "@@NAME@@",
    "@@VERSION@@",
    "@@RELEASE@@",
    "@@DESCRIPTION@@",
    "@@LICENSE@@",
    "@@URL@@",
    "@@REPO_URL@@",
];

/// Wraps `s` in single quotes so it can be used as a shell word.
///
/// Single quotes inside of `s` aren't escaped.
pub fn sh_str(s: &str) -> String {
    format!("'{}'", s)
}

/// Turns `list` into a shell array of single quoted strings, e.g. `('MIT' 'Apache-2.0')`
pub fn sh_array<S: AsRef<str>>(list: &[S]) -> String {
    let items = list
        .iter()
        .map(|x| sh_str(x.as_ref()))
        .collect::<Vec<String>>();

    format!("({})", items.join(" "))
}

/// Returns what `token` should be replaced with for `pkg_info`, or None if `token` isn't one of
/// [TOKENS](crate::helpers::TOKENS)
pub fn render_token(token: &str, pkg_info: &PkgInfo) -> Option<String> {
    match token {
        "@@NAME@@" => Some(sh_str(&pkg_info.pkg_name)),
        "@@VERSION@@" => Some(sh_str(&pkg_info.version)),
        "@@RELEASE@@" => Some(sh_str(&pkg_info.release)),
        "@@DESCRIPTION@@" => Some(sh_str(&pkg_info.description)),
        "@@LICENSE@@" => Some(sh_array(&pkg_info.license[..])),
        "@@URL@@" => Some(sh_str(&pkg_info.url)),
        // Used inside of strings that are quoted already, e.g. in `source=`
        "@@REPO_URL@@" => Some(pkg_info.url.clone()),
        _ => None,
    }
}

/// Checks whether `template` contains any of the known [TOKENS](crate::helpers::TOKENS)
pub fn has_tokens(template: &str) -> bool {
    TOKENS.iter().any(|x| template.contains(x))
}
