//! Steam Community scraping for data the Web API does not expose.
//!
//! Group membership has no Web API endpoint; [`crate::Client::group_members`]
//! fetches the community site's member-list XML instead. These requests go
//! to the community host, need no API key, and work on a keyless client.

mod client;
