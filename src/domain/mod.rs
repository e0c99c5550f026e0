// Domain layer: the match aggregate, its value objects, the scoreboard projection
// and the ports the services talk to. No I/O happens here.

pub mod aggregate;
pub mod model;
pub mod ports;
pub mod scoreboard;
