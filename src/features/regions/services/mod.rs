mod region_resolver;

pub use region_resolver::RegionResolver;
