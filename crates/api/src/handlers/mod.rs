pub mod graphql;
pub mod site_diary;
