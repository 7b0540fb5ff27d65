pub mod category_form;
pub mod expense_form;
