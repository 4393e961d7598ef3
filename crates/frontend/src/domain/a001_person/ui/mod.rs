pub mod assignee_select;
