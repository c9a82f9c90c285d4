use sea_orm::{
    sea_query::{Expr, Func, LikeExpr, SimpleExpr},
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, Set, TransactionTrait,
};

use crate::db::entities::{artist, show, venue};
use crate::db::genres;
use crate::error::{AppError, Result};
use crate::forms::{ArtistForm, NewShow, VenueForm};
use crate::views::ShowListItem;

/// Escapes LIKE wildcards so the search term is matched literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Case-insensitive substring match. An empty term matches every row.
fn name_contains<C: ColumnTrait>(column: C, term: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(&term.to_lowercase()));
    Expr::expr(Func::lower(Expr::col(column.as_column_ref())))
        .like(LikeExpr::new(pattern).escape('\\'))
}

pub struct VenueRepository {
    db: DatabaseConnection,
}

impl VenueRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<venue::Model>> {
        Ok(venue::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn get(&self, id: i32) -> Result<venue::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Venue {} not found", id)))
    }

    pub async fn find_all(&self) -> Result<Vec<venue::Model>> {
        Ok(venue::Entity::find()
            .order_by_asc(venue::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// Newest venues first, using the id as a proxy for creation order.
    pub async fn find_recent(&self, limit: u64) -> Result<Vec<venue::Model>> {
        Ok(venue::Entity::find()
            .order_by_desc(venue::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await?)
    }

    pub async fn search(&self, term: &str) -> Result<Vec<venue::Model>> {
        Ok(venue::Entity::find()
            .filter(name_contains(venue::Column::Name, term))
            .order_by_asc(venue::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn create(&self, form: &VenueForm) -> Result<venue::Model> {
        let mut active = venue::ActiveModel {
            ..Default::default()
        };
        apply_venue_form(&mut active, form);

        let txn = self.db.begin().await?;
        let venue = active.insert(&txn).await?;
        txn.commit().await?;

        Ok(venue)
    }

    /// Replaces every editable field of the venue with the form contents.
    pub async fn update(&self, id: i32, form: &VenueForm) -> Result<venue::Model> {
        let txn = self.db.begin().await?;
        let existing = venue::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Venue {} not found", id)))?;

        let mut active: venue::ActiveModel = existing.into();
        apply_venue_form(&mut active, form);
        let venue = active.update(&txn).await?;
        txn.commit().await?;

        Ok(venue)
    }

    /// Deletes a venue that has no shows. Venues with shows are rejected with
    /// a conflict rather than cascading.
    pub async fn delete(&self, id: i32) -> Result<venue::Model> {
        let txn = self.db.begin().await?;
        let existing = venue::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Venue {} not found", id)))?;

        let show_count = show::Entity::find()
            .filter(show::Column::VenueId.eq(id))
            .count(&txn)
            .await?;
        if show_count > 0 {
            txn.rollback().await?;
            return Err(AppError::Conflict(format!(
                "Venue {} has {} scheduled show(s) and cannot be deleted.",
                existing.name, show_count
            )));
        }

        venue::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        Ok(existing)
    }
}

fn apply_venue_form(active: &mut venue::ActiveModel, form: &VenueForm) {
    active.name = Set(form.name.clone());
    active.city = Set(form.city.clone());
    active.state = Set(form.state.clone());
    active.address = Set(form.address.clone());
    active.phone = Set(form.phone.clone());
    active.genres = Set(genres::encode(&form.genres));
    active.facebook_link = Set(form.facebook_link.clone());
    active.image_link = Set(form.image_link.clone());
    active.website = Set(form.website_link.clone());
    active.seeking_talent = Set(form.seeking_talent);
    active.seeking_description = Set(form.seeking_description.clone());
}

pub struct ArtistRepository {
    db: DatabaseConnection,
}

impl ArtistRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<artist::Model>> {
        Ok(artist::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn get(&self, id: i32) -> Result<artist::Model> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Artist {} not found", id)))
    }

    pub async fn find_all(&self) -> Result<Vec<artist::Model>> {
        Ok(artist::Entity::find()
            .order_by_asc(artist::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn find_recent(&self, limit: u64) -> Result<Vec<artist::Model>> {
        Ok(artist::Entity::find()
            .order_by_desc(artist::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await?)
    }

    pub async fn search(&self, term: &str) -> Result<Vec<artist::Model>> {
        Ok(artist::Entity::find()
            .filter(name_contains(artist::Column::Name, term))
            .order_by_asc(artist::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn create(&self, form: &ArtistForm) -> Result<artist::Model> {
        let mut active = artist::ActiveModel {
            ..Default::default()
        };
        apply_artist_form(&mut active, form);

        let txn = self.db.begin().await?;
        let artist = active.insert(&txn).await?;
        txn.commit().await?;

        Ok(artist)
    }

    pub async fn update(&self, id: i32, form: &ArtistForm) -> Result<artist::Model> {
        let txn = self.db.begin().await?;
        let existing = artist::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Artist {} not found", id)))?;

        let mut active: artist::ActiveModel = existing.into();
        apply_artist_form(&mut active, form);
        let artist = active.update(&txn).await?;
        txn.commit().await?;

        Ok(artist)
    }
}

fn apply_artist_form(active: &mut artist::ActiveModel, form: &ArtistForm) {
    active.name = Set(form.name.clone());
    active.city = Set(form.city.clone());
    active.state = Set(form.state.clone());
    active.phone = Set(form.phone.clone());
    active.genres = Set(genres::encode(&form.genres));
    active.facebook_link = Set(form.facebook_link.clone());
    active.image_link = Set(form.image_link.clone());
    active.website = Set(form.website_link.clone());
    active.seeking_venue = Set(form.seeking_venue);
    active.seeking_description = Set(form.seeking_description.clone());
}

pub struct ShowRepository {
    db: DatabaseConnection,
}

impl ShowRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Shows joined with their venue and artist, earliest first.
    fn listing() -> Select<show::Entity> {
        show::Entity::find()
            .select_only()
            .column(show::Column::Id)
            .column(show::Column::VenueId)
            .column(show::Column::ArtistId)
            .column(show::Column::StartTime)
            .column_as(venue::Column::Name, "venue_name")
            .column_as(venue::Column::ImageLink, "venue_image_link")
            .column_as(artist::Column::Name, "artist_name")
            .column_as(artist::Column::ImageLink, "artist_image_link")
            .join(JoinType::InnerJoin, show::Relation::Venue.def())
            .join(JoinType::InnerJoin, show::Relation::Artist.def())
            .order_by_asc(show::Column::StartTime)
            .order_by_asc(show::Column::Id)
    }

    pub async fn find_all(&self) -> Result<Vec<ShowListItem>> {
        Ok(Self::listing()
            .into_model::<ShowListItem>()
            .all(&self.db)
            .await?)
    }

    pub async fn find_for_venue(&self, venue_id: i32) -> Result<Vec<ShowListItem>> {
        Ok(Self::listing()
            .filter(show::Column::VenueId.eq(venue_id))
            .into_model::<ShowListItem>()
            .all(&self.db)
            .await?)
    }

    pub async fn find_for_artist(&self, artist_id: i32) -> Result<Vec<ShowListItem>> {
        Ok(Self::listing()
            .filter(show::Column::ArtistId.eq(artist_id))
            .into_model::<ShowListItem>()
            .all(&self.db)
            .await?)
    }

    /// Referential integrity is left to the store: an unknown artist or venue
    /// id fails the insert with a foreign key violation.
    pub async fn create(&self, new_show: &NewShow) -> Result<show::Model> {
        let active = show::ActiveModel {
            artist_id: Set(new_show.artist_id),
            venue_id: Set(new_show.venue_id),
            start_time: Set(new_show.start_time),
            ..Default::default()
        };

        let txn = self.db.begin().await?;
        let show = active.insert(&txn).await?;
        txn.commit().await?;

        Ok(show)
    }
}
