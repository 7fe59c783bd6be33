pub mod cache;
pub mod redis;

pub use cache::{MemoryCache, RecommendationCache};
pub use redis::create_redis_client;
pub use redis::CacheKey;
pub use redis::RedisCache;
