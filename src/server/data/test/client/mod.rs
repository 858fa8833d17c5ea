use crate::{
    model::client::Gender,
    server::{
        data::client::ClientRepository,
        model::{client::Client, hotel::Hotel, pet::Pet},
    },
};
use chrono::{NaiveDate, Utc};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find_all;
mod find_by_id;
mod save;

/// Client graph that has never been persisted.
fn new_client(name: &str) -> Client {
    Client {
        id: 0,
        name: name.to_string(),
        surname: Some("García".to_string()),
        registration_date: Some(Utc::now().date_naive()),
        image: format!("code-{}.png", name),
        hotel: None,
        pets: Vec::new(),
    }
}

fn new_pet(name: &str, gender: Gender) -> Pet {
    Pet {
        id: 0,
        client_id: None,
        name: name.to_string(),
        breed: None,
        birth_date: NaiveDate::from_ymd_opt(2021, 3, 14),
        gender: Some(gender),
    }
}

fn new_hotel(name: &str) -> Hotel {
    Hotel {
        id: 0,
        name: name.to_string(),
        address: Some("Calle Mayor 1".to_string()),
    }
}
