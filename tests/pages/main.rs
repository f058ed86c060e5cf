mod mp_search;
