// ABOUTME: API module containing all HTTP handler functions for the catalogd REST API.
// ABOUTME: Holds the products sub-module covering the full CRUD surface.

pub mod products;
