pub mod faq_accordion;
pub mod page_header;
