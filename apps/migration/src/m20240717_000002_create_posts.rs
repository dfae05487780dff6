use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Posts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Posts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Posts::Title).string_len(250).not_null().unique_key())
                    .col(ColumnDef::new(Posts::Subtitle).string_len(250).not_null())
                    .col(ColumnDef::new(Posts::Slug).string_len(250).not_null().unique_key())
                    .col(ColumnDef::new(Posts::PublishedOn).date().not_null())
                    .col(ColumnDef::new(Posts::Body).text().not_null())
                    .col(ColumnDef::new(Posts::Author).string_len(250).not_null())
                    .col(ColumnDef::new(Posts::ImageUrl).string_len(250).not_null())
                    .to_owned(),
            )
            .await?;

        // Home page ordering.
        manager
            .create_index(
                Index::create()
                    .name("idx_posts_published_on")
                    .table(Posts::Table)
                    .col(Posts::PublishedOn)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Posts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Posts {
    Table,
    Id,
    Title,
    Subtitle,
    Slug,
    PublishedOn,
    Body,
    Author,
    ImageUrl,
}
