pub mod add;
pub mod edit;
pub mod list;
pub mod remove;
pub mod retag;
pub mod show;
pub mod tag;
pub mod tags;
pub mod untag;
