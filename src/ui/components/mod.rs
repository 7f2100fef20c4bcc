pub mod breakdown_panel;
pub mod comparison_table;
pub mod item_editor;
pub mod kpi_card;
pub mod margin_badge;
pub mod number_field;
pub mod toast;
