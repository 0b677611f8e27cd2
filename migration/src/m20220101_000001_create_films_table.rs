use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Films::Table)
                    .if_not_exists()
                    .col(pk_auto(Films::Id))
                    .col(string(Films::Email))
                    .col(string(Films::Title))
                    .col(string(Films::Genre))
                    .col(string(Films::ReleaseYear))
                    .col(boolean(Films::IsWatched))
                    .to_owned(),
            )
            .await?;

        // The unique key spans all rows, not one tenant's: email is not part
        // of the index.
        manager
            .create_index(
                Index::create()
                    .name("idx_films_title_release_year")
                    .table(Films::Table)
                    .col(Films::Title)
                    .col(Films::ReleaseYear)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_films_email")
                    .table(Films::Table)
                    .col(Films::Email)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Films::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Films {
    Table,
    Id,
    Email,
    Title,
    Genre,
    ReleaseYear,
    IsWatched,
}
