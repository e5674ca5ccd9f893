pub mod kpi_card;
pub mod land_use_map;
pub mod materials_table;
pub mod toast;
