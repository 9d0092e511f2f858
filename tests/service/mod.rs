mod weather;
