use std::collections::HashSet;

use futures_util::stream::{self, Stream, TryStreamExt};
use tracing::{debug, info, warn};

use crate::entities::{Incident, RawIncident};
use crate::errors::{RektError, RektResult};
use crate::ports::IncidentSource;
use crate::value_objects::IncidentId;

/// Which upstream listing a `Pager` walks.
#[derive(Debug, Clone, Copy)]
enum Listing<'a> {
    All,
    Search(&'a str),
}

/// Lazily walks the source page by page.
///
/// Pages are requested strictly one after another. Ids already handed out are
/// dropped before a page is trimmed, so repeats never use up the limit. The
/// walk ends on the first short or empty page, on a full page with nothing
/// new in it, or once `limit` records have been handed out. The last page is
/// truncated so callers never receive more than `limit` records.
pub struct Pager<'a> {
    source: &'a dyn IncidentSource,
    listing: Listing<'a>,
    page_size: usize,
    limit: usize,
    next_page: usize,
    held: usize,
    seen: HashSet<IncidentId>,
    exhausted: bool,
}

impl<'a> Pager<'a> {
    pub fn new(source: &'a dyn IncidentSource, page_size: usize, limit: usize) -> Self {
        Self::with_listing(source, Listing::All, page_size, limit)
    }

    /// Walks the `searchText` listing instead of the full one.
    pub fn search(source: &'a dyn IncidentSource, text: &'a str, page_size: usize, limit: usize) -> Self {
        Self::with_listing(source, Listing::Search(text), page_size, limit)
    }

    fn with_listing(source: &'a dyn IncidentSource, listing: Listing<'a>, page_size: usize, limit: usize) -> Self {
        Self {
            source,
            listing,
            page_size: page_size.max(1),
            limit,
            next_page: 1,
            held: 0,
            seen: HashSet::new(),
            exhausted: false,
        }
    }

    pub fn pages_requested(&self) -> usize {
        self.next_page - 1
    }

    async fn request(&self, page_number: usize) -> RektResult<Vec<RawIncident>> {
        match self.listing {
            Listing::All => self.source.fetch_page(page_number, self.page_size).await,
            Listing::Search(text) => self.source.search(text, page_number, self.page_size).await,
        }
    }

    pub async fn next_page(&mut self) -> RektResult<Option<Vec<Incident>>> {
        if self.exhausted || self.held >= self.limit {
            return Ok(None);
        }
        let page_number = self.next_page;
        let raw = self.request(page_number).await?;
        self.next_page += 1;
        debug!(page = page_number, records = raw.len(), "fetched rekt page");

        if raw.len() < self.page_size {
            self.exhausted = true;
        }
        if raw.is_empty() {
            return Ok(None);
        }

        let mut page = Vec::with_capacity(raw.len());
        for incident in raw.into_iter().map(Incident::try_from_raw) {
            let incident = incident?;
            if !self.seen.insert(incident.id.clone()) {
                warn!(id = %incident.id, page = page_number, "dropping repeated rekt id");
                continue;
            }
            page.push(incident);
        }
        if page.is_empty() {
            warn!(page = page_number, "page carried no new rekt ids, stopping");
            self.exhausted = true;
            return Ok(None);
        }

        page.truncate(self.limit - self.held);
        self.held += page.len();
        Ok(Some(page))
    }

    pub fn into_stream(self) -> impl Stream<Item = RektResult<Vec<Incident>>> + 'a {
        stream::try_unfold(self, |mut pager| async move {
            Ok::<_, RektError>(pager.next_page().await?.map(|page| (page, pager)))
        })
    }

    /// Drains the walk into one collection sorted ascending by date.
    pub async fn collect_sorted(self) -> RektResult<Vec<Incident>> {
        let pages: Vec<Vec<Incident>> = self.into_stream().try_collect().await?;
        let page_count = pages.len();
        let mut incidents: Vec<Incident> = pages.into_iter().flatten().collect();
        incidents.sort_by(|a, b| a.date.cmp(&b.date));

        info!(pages = page_count, records = incidents.len(), "rekt fetch complete");
        Ok(incidents)
    }
}

/// Fetches up to `limit` distinct records sorted by date.
pub async fn collect_all(
    source: &dyn IncidentSource,
    page_size: usize,
    limit: usize,
) -> RektResult<Vec<Incident>> {
    Pager::new(source, page_size, limit).collect_sorted().await
}

/// Same walk over the `searchText` listing.
pub async fn collect_search(
    source: &dyn IncidentSource,
    text: &str,
    page_size: usize,
    limit: usize,
) -> RektResult<Vec<Incident>> {
    Pager::search(source, text, page_size, limit).collect_sorted().await
}
