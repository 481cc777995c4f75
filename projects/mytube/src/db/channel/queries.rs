use diesel::prelude::*;
use diesel::upsert::excluded;
use thiserror::Error;

use crate::db::{channel::models::*, schema::channels::dsl::*};

#[derive(Debug, Error)]
pub enum UpsertChannelsError {
    #[error("UpsertChannels: {source}")]
    UpsertChannels {
        #[from]
        source: diesel::result::Error,
    },
}

pub fn upsert_channels(
    conn: &mut PgConnection,
    new: &[NewChannel],
) -> Result<usize, UpsertChannelsError> {
    diesel::insert_into(channels)
        .values(new)
        .on_conflict(channel_id)
        .do_update()
        .set((
            title.eq(excluded(title)),
            description.eq(excluded(description)),
            subscribed_at.eq(excluded(subscribed_at)),
            fetched_at.eq(excluded(fetched_at)),
        ))
        .execute(conn)
        .map_err(|source| UpsertChannelsError::UpsertChannels { source })
}
