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

use clap::{App, YamlLoader};
use env_logger::Builder;
use libpkgbuildgen::*;
use std::path::PathBuf;

use log::{debug, error, warn};

pub(crate) struct BinOptions {
    pub out_dir: PathBuf,
    pub template: PathBuf,
    pub package_release: String,
    pub metadata: PathBuf,
    pub verbose: bool,
    pub debug: bool,
}

fn main() {
    let bin_options = help_string();

    set_up_logging(bin_options.debug, bin_options.verbose);

    // main() could return a Result, but then we'd lose the `env_logger` formatting of the error
    if let Err(e) = actual_work(&bin_options) {
        error!("{}", e.to_string());
        std::process::exit(1);
    }
}

fn actual_work(opts: &BinOptions) -> Result<(), Error> {
    let mut pkg_builder = PkgBuilder::from_metadata(&opts.metadata)?;

    let template = pkg_builder
        .set_release(&opts.package_release)
        .generate_from_file(&opts.template)?;

    // Only write once everything else worked out, so we never leave a half-done PKGBUILD behind
    let pkgbuild_path = write_template(&template, &opts.out_dir)?;

    debug!("Done writing {}", pkgbuild_path.display());

    Ok(())
}

fn set_up_logging(is_debug: bool, is_verbose: bool) {
    let mut builder = Builder::new();

    if is_debug {
        builder
            .filter_module("libpkgbuildgen", log::LevelFilter::Debug)
            .filter_module("pkgbuildgen", log::LevelFilter::Debug);
    } else if is_verbose {
        builder
            .filter_module("libpkgbuildgen", log::LevelFilter::Info)
            .filter_module("pkgbuildgen", log::LevelFilter::Info);
    } else {
        builder
            .filter_module("libpkgbuildgen", log::LevelFilter::Warn)
            .filter_module("pkgbuildgen", log::LevelFilter::Warn);
    }

    builder.default_format_timestamp(false).init();

    if is_debug && is_verbose {
        warn!("Specified both --verbose and --debug! Will ignore --verbose.");
    }
}

// Print the help script if invoked without arguments or with `--help`/`-h`
fn help_string() -> BinOptions {
    let help_yaml =
        YamlLoader::load_from_str(include_str!(concat!(env!("OUT_DIR"), "/cli_gen.yml"))).unwrap();
    let matches = App::from_yaml(&help_yaml[0]).get_matches();

    // clap makes sure required args are present and the others have a default
    let out_dir = PathBuf::from(matches.value_of("out_dir").unwrap());

    let template = PathBuf::from(matches.value_of("template").unwrap());

    let package_release = String::from(matches.value_of("package_release").unwrap());

    let metadata = PathBuf::from(matches.value_of("metadata").unwrap());

    let verbose = matches.is_present("verbose");

    let debug = matches.is_present("debug");

    BinOptions {
        out_dir,
        template,
        package_release,
        metadata,
        verbose,
        debug,
    }
}
