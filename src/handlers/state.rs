use crate::db::{
    ClientStore, DbPool, EquipmentSaleStore, EquipmentStore, ManufacturerStore, OfferStore,
    StaffStore, SupplierStore,
};

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub clients: ClientStore,
    pub offers: OfferStore,
    pub suppliers: SupplierStore,
    pub manufacturers: ManufacturerStore,
    pub equipment: EquipmentStore,
    pub equipment_sales: EquipmentSaleStore,
    pub staff: StaffStore,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        Self {
            clients: ClientStore::new(pool.clone()),
            offers: OfferStore::new(pool.clone()),
            suppliers: SupplierStore::new(pool.clone()),
            manufacturers: ManufacturerStore::new(pool.clone()),
            equipment: EquipmentStore::new(pool.clone()),
            equipment_sales: EquipmentSaleStore::new(pool.clone()),
            staff: StaffStore::new(pool),
        }
    }
}
