//! Domain types shared by the request builder and the response interpreter, plus the ports
//! through which the core reaches its collaborators (signing, amount formatting, time).

pub mod params;
pub mod payload;
pub mod ports;
pub mod reply;
