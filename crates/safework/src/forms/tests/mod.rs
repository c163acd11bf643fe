mod checklist;
mod common;
mod jha;
mod osa;
mod rie;
mod sam;
