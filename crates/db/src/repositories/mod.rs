pub mod site_diary_repo;

pub use site_diary_repo::SiteDiaryRepo;
