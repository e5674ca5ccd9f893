pub mod about;
pub mod building_placement;
pub mod home;
pub mod infrastructure;

pub use about::AboutPage;
pub use building_placement::BuildingPlacementPage;
pub use home::HomePage;
pub use infrastructure::InfrastructurePage;
