//! The endpoint table: one module per remote resource, each adding thin
//! wrapper methods to [`CannyClient`](crate::CannyClient) that pair a fixed
//! path with a typed payload.

mod boards;
mod categories;
mod changelog_entries;
mod comments;
mod companies;
mod opportunities;
mod posts;
mod status_changes;
mod tags;
mod users;
mod votes;

pub use categories::{CreateCategoryOptions, CreateCategoryResponse, ListCategoriesOptions, ListCategoriesResponse};
pub use changelog_entries::{
    ChangelogEntryType, ChangelogSort, CreateChangelogEntryOptions, CreateChangelogEntryResponse,
    ListChangelogEntriesOptions, ListChangelogEntriesResponse,
};
pub use comments::{
    CreateCommentOptions, CreateCommentResponse, ListCommentsOptions, ListCommentsResponse,
};
pub use companies::{
    ListCompaniesOptions, ListCompaniesResponse, UpdateCompanyOptions, UpdateCompanyResponse,
};
pub use opportunities::{ListOpportunitiesOptions, ListOpportunitiesResponse};
pub use posts::{
    ChangePostCategoryOptions, ChangePostStatusOptions, CreatePostOptions, CreatePostResponse,
    ListPostsOptions, ListPostsResponse, PostSort, RetrievePostOptions, UpdatePostOptions,
};
pub use status_changes::{ListStatusChangesOptions, ListStatusChangesResponse};
pub use tags::{CreateTagOptions, ListTagsOptions, ListTagsResponse};
pub use users::{
    CreateOrUpdateUserOptions, CreateOrUpdateUserResponse, ListUsersOptions, RetrieveUserOptions,
};
pub use votes::{CreateVoteOptions, DeleteVoteOptions, ListVotesOptions, ListVotesResponse};
