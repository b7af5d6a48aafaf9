pub mod faq;
