//! Static list of well-known tickers shown before the symbol prompt.
//!
//! The catalog is display-only; symbols outside it are accepted everywhere.

use std::io::Write;

/// One ticker and the company it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Upper-case ticker symbol.
    pub symbol: &'static str,
    /// Company display name.
    pub name: &'static str,
}

/// Catalog in display order.
pub const CATALOG: &[CatalogEntry] = &[
    CatalogEntry { symbol: "AAPL", name: "Apple Inc." },
    CatalogEntry { symbol: "MSFT", name: "Microsoft Corporation" },
    CatalogEntry { symbol: "GOOGL", name: "Alphabet Inc. (Google)" },
    CatalogEntry { symbol: "AMZN", name: "Amazon.com Inc." },
    CatalogEntry { symbol: "TSLA", name: "Tesla, Inc." },
];

/// Heading printed above the catalog.
pub const CATALOG_HEADING: &str = "Common Stock Symbols and Company Names:";

/// Print the heading followed by one `SYM: Name` line per entry.
///
/// # Errors
/// Propagates write failures from `out`.
pub fn write_catalog<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{CATALOG_HEADING}")?;
    for e in CATALOG {
        writeln!(out, "{}: {}", e.symbol, e.name)?;
    }
    Ok(())
}
