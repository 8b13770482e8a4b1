pub mod site_diary;
