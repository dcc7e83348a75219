//! Flight search server.
//!
//! A web application with two page surfaces — a flight search form and
//! a results page — connected only through URL query parameters, over
//! read-only in-memory airport and offer catalogs.

pub mod catalog;
pub mod domain;
pub mod navigation;
pub mod presenter;
pub mod search;
pub mod web;
