use marquee_types::{Catalog, Film, FilmId};

/// Toggle a film on the ranked shortlist.
///
/// Appends at the end if absent, removes if present. Never duplicates.
pub fn toggle(favorites: &[FilmId], id: &FilmId) -> Vec<FilmId> {
    if favorites.contains(id) {
        favorites.iter().filter(|f| *f != id).cloned().collect()
    } else {
        let mut next = favorites.to_vec();
        next.push(id.clone());
        next
    }
}

/// Move `source` to the position currently held by `dest`.
///
/// A minimal single-element relocation: both indices are looked up on the
/// input order, the element is removed at the old index and reinserted at
/// the new one, shifting everything in between by one slot. The same steps
/// apply whether the move goes up or down the list. When `source == dest`
/// or either id is absent, the input order is returned unchanged.
pub fn reorder(favorites: &[FilmId], source: &FilmId, dest: &FilmId) -> Vec<FilmId> {
    let mut next = favorites.to_vec();

    if source == dest {
        return next;
    }
    let (Some(old_index), Some(new_index)) = (
        favorites.iter().position(|f| f == source),
        favorites.iter().position(|f| f == dest),
    ) else {
        return next;
    };

    let moved = next.remove(old_index);
    next.insert(new_index, moved);
    next
}

/// Resolve the shortlist against the catalog, in rank order.
///
/// Ids with no catalog entry drop out of the view here, at read time only;
/// the persisted sequence is never rewritten, so an id that reappears in a
/// future catalog restores itself automatically.
pub fn ranked_films<'a>(favorites: &[FilmId], catalog: &'a Catalog) -> Vec<&'a Film> {
    favorites.iter().filter_map(|id| catalog.film(id)).collect()
}
