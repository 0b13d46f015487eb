//! HTTP endpoint.
//!
//! | Method | Path      | Response                                   |
//! |--------|-----------|--------------------------------------------|
//! | GET    | `/health` | `200 {"status":"ok"}`                      |
//! | GET    | `/offers` | `200 {"results":[Offer]}`, `502` on provider failure |
//! | POST   | `/bets`   | `201 {"id":uuid}`, `500` on store failure   |

pub mod handler;
pub mod server;

pub use server::{router, serve, HttpState};
