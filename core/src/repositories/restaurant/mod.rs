#[path = "trait.rs"]
mod trait_;
mod mock;

#[cfg(test)]
#[path = "tests/mock_tests.rs"]
mod mock_tests;

pub use mock::MockRestaurantRepository;
pub use trait_::RestaurantRepository;
