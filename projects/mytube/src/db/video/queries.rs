use diesel::prelude::*;
use diesel::upsert::excluded;
use thiserror::Error;

use crate::db::{schema::videos::dsl::*, video::models::*};

#[derive(Debug, Error)]
pub enum UpsertVideosError {
    #[error("UpsertVideos: {source}")]
    UpsertVideos {
        #[from]
        source: diesel::result::Error,
    },
}

pub fn upsert_videos(
    conn: &mut PgConnection,
    new: &[NewVideo],
) -> Result<usize, UpsertVideosError> {
    diesel::insert_into(videos)
        .values(new)
        .on_conflict(video_id)
        .do_update()
        .set((
            title.eq(excluded(title)),
            published_at.eq(excluded(published_at)),
            fetched_at.eq(excluded(fetched_at)),
        ))
        .execute(conn)
        .map_err(|source| UpsertVideosError::UpsertVideos { source })
}
