pub mod site_data;
