pub use client_tables::ClientTable;
pub use equipment_sale_tables::EquipmentSaleTable;
pub use equipment_tables::EquipmentTable;
pub use manufacturer_tables::ManufacturerTable;
pub use offer_tables::OfferTable;
pub use staff_tables::StaffTable;
pub use supplier_tables::SupplierTable;

pub mod client_tables;
pub mod equipment_sale_tables;
pub mod equipment_tables;
pub mod manufacturer_tables;
pub mod offer_tables;
pub mod staff_tables;
pub mod supplier_tables;

/// Every `CREATE` statement of the schema, parents before children.
pub fn schema() -> Vec<String> {
    vec![
        ClientTable::create_table(),
        OfferTable::create_table(),
        OfferTable::create_client_index(),
        SupplierTable::create_table(),
        ManufacturerTable::create_table(),
        EquipmentTable::create_table(),
        EquipmentSaleTable::create_table(),
        StaffTable::create_table(),
    ]
}
