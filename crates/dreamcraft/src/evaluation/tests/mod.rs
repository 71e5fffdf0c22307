mod common;
mod valuation;
