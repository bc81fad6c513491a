pub mod excel;
pub mod pdf;
pub mod table;

pub use excel::ExcelWriter;
pub use pdf::PdfWriter;
pub use table::TableRenderer;
