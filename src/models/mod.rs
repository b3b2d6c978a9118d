pub mod city;
pub mod community;
pub mod donation_point;
pub mod donor;
pub mod feeding_point;
pub mod fundraiser;
pub mod missing_person;
pub mod shelter;
pub mod volunteer;

pub use city::{Entity as City, Model as CityModel};
pub use community::{Entity as Community, Model as CommunityModel};
pub use donation_point::{Entity as DonationPoint, Model as DonationPointModel};
pub use donor::{Entity as Donor, Model as DonorModel};
pub use feeding_point::{Entity as FeedingPoint, Model as FeedingPointModel};
pub use fundraiser::{Entity as Fundraiser, Model as FundraiserModel};
pub use missing_person::{Entity as MissingPerson, Model as MissingPersonModel};
pub use shelter::{Entity as Shelter, Model as ShelterModel};
pub use volunteer::{Entity as Volunteer, Model as VolunteerModel};
