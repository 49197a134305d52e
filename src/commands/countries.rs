//! Countries command - list catalog entries

use crate::catalog::CountryCatalog;
use crate::output;

/// Execute the countries command
pub fn execute(catalog: &CountryCatalog, filter: Option<&str>, quiet: bool) {
    let countries = catalog.search(filter.unwrap_or(""));

    if countries.is_empty() {
        if !quiet {
            println!("No countries found.");
        }
        return;
    }

    if !quiet {
        println!("Countries ({}):", countries.len());
    }
    for country in countries {
        println!("{}", output::country_line(country, quiet));
    }
}
