pub mod client;
pub mod equipment;
pub mod equipment_sale;
pub mod manufacturer;
pub mod offer;
pub mod staff;
pub mod supplier;

pub use client::{Client, NewClient};
pub use equipment::{Equipment, NewEquipment};
pub use equipment_sale::{EquipmentSale, NewEquipmentSale};
pub use manufacturer::{Manufacturer, NewManufacturer};
pub use offer::{NewOffer, Offer};
pub use staff::{NewStaff, Staff};
pub use supplier::{NewSupplier, Supplier};
