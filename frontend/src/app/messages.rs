use common::catalog::LoadedCatalog;
use common::error::CatalogError;
use common::model::product::Product;
use common::store::LoadTicket;

pub enum Msg {
    LoadCatalog,
    CatalogLoaded(LoadTicket, Result<LoadedCatalog, CatalogError>),
    AddToCart(Product),
}
