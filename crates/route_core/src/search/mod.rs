pub mod cheapest;
pub mod fewest_hops;
pub mod route;
