//! Global allocator for the widget bundle.
//!
//! The bundle is loaded into arbitrary host pages, so its size matters more
//! than allocation speed.
//!
//! - default: `dlmalloc`
//! - `alloc-talc`: `talc`, smaller code, grows linear memory on demand

#[cfg(all(target_arch = "wasm32", not(feature = "alloc-talc")))]
#[global_allocator]
static ALLOC: dlmalloc::GlobalDlmalloc = dlmalloc::GlobalDlmalloc;

#[cfg(all(target_arch = "wasm32", feature = "alloc-talc"))]
#[global_allocator]
static ALLOC: talc::Talck<talc::locking::AssumeUnlockable, talc::ClaimOnOom> =
    talc::Talc::new(unsafe {
        // SAFETY: an empty span claims every page from memory.grow on first
        // use; wasm32 has a single thread, so AssumeUnlockable holds.
        talc::ClaimOnOom::new(talc::Span::empty())
    })
    .lock();
