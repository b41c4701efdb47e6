//! Pagination module
//!
//! Paged listings on the ion API advertise their cursors through the
//! `Link` response header. This module parses that header into structured
//! next/prev cursor URLs and handles the header-absent case.

mod links;

pub use links::PaginationLinks;

#[cfg(test)]
mod tests;
